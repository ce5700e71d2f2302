use yew::prelude::*;

const TECH_STACK: [&str; 8] = [
    "Rust",
    "Actix Web",
    "Yew",
    "FastAPI",
    "TensorFlow/Keras",
    "OpenCV",
    "NumPy",
    "Kaggle",
];

const ARCHITECTURE_IMAGE: &str =
    "https://cdn.analyticsvidhya.com/wp-content/uploads/2020/10/90650dnn2.webp";

pub fn render_about() -> Html {
    html! {
        <div class="about">
            <h1 class="main-header">{"About this Project"}</h1>
            <p>
                {"This application uses machine learning to classify the ripeness of bananas and \
                  predict how many days remain before they become rotten. The system helps reduce \
                  food waste by providing accurate predictions about banana freshness."}
            </p>

            <h2 class="sub-header">{"How It Works"}</h2>
            <ol>
                <li><strong>{"Image Upload"}</strong>{": Users upload an image of a banana"}</li>
                <li><strong>{"Preprocessing"}</strong>{": The image is resized and normalized for the model"}</li>
                <li><strong>{"Classification"}</strong>{": A convolutional neural network classifies the ripeness stage"}</li>
                <li><strong>{"Prediction"}</strong>{": Based on the image, days until rotten are estimated"}</li>
                <li><strong>{"Results"}</strong>{": The system displays the ripeness stage and recommendations"}</li>
            </ol>

            <h2 class="sub-header">{"Tech Stack"}</h2>
            <div class="tech-stack">
                { for TECH_STACK.iter().map(|tech| html! { <span class="tech-item">{ *tech }</span> }) }
                <a href="https://github.com/google/automl/tree/master/efficientnetv2" target="_blank">
                    <span class="tech-item link">{"EfficientNetV2B0 GitHub"}</span>
                </a>
            </div>

            <h2 class="sub-header">{"Project Links"}</h2>
            <div class="columns">
                <div class="column">
                    <strong>{"GitHub Repository:"}</strong>
                    <br />
                    <a href="https://github.com/yourusername/banana-ripeness-classifier" target="_blank">
                        {"github.com/yourusername/banana-ripeness-classifier"}
                    </a>
                </div>
                <div class="column">
                    <strong>{"LinkedIn Profile:"}</strong>
                    <br />
                    <a href="https://linkedin.com/in/zrmdcs12" target="_blank">
                        {"linkedin.com/in/zrmdcs12"}
                    </a>
                </div>
            </div>

            <h2 class="sub-header">{"Model Architecture"}</h2>
            <figure>
                <img src={ARCHITECTURE_IMAGE} alt="CNN Model Architecture" class="architecture" />
                <figcaption>{"CNN Model Architecture"}</figcaption>
            </figure>
            <p>
                {"The model is based on a convolutional neural network (CNN) with transfer learning. \
                  We use a pre-trained EfficientNet backbone with custom layers for banana-specific \
                  classification. The model outputs both a ripeness classification and a regression \
                  value for days until rotten."}
            </p>
        </div>
    }
}
